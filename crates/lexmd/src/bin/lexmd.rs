fn main() {
    if let Err(err) = lexmd::run() {
        eprintln!("{}", lexmd::format_error(&err));
        std::process::exit(1);
    }
}
