use clap::Parser;
use spark_quiz::Config;

fn main() {
    pretty_env_logger::init();

    let config = Config::parse();
    log::info!(
        "Starting quiz from {} ({} questions)",
        config.questions.display(),
        config.count
    );

    if let Err(e) = spark_quiz::run(config) {
        log::error!("{}", e);
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
