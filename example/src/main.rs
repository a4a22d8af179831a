fn main() {
    if let Err(err) = example::run() {
        eprintln!("gallery session failed: {err}");
        std::process::exit(1);
    }
}
