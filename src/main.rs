fn main() {
    if let Err(err) = scribe::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
