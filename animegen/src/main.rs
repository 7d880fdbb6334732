use clap::Parser;

fn main() {
    animegen::init_logger();

    let cli = animegen::cli::Cli::parse();
    if let Err(e) = animegen::run(cli) {
        log::error!("{e:?}");
        std::process::exit(1);
    }
}
