use placement_cleaner::interfaces::cli;

fn main() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    if let Err(err) = cli::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
