use scaffgen::Logger;

fn main() {
    if let Err(e) = scaffgen::interface::run() {
        Logger::new(false).error(&e.to_string());
        std::process::exit(1);
    }
}
