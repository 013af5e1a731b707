use clap::Parser;
use trivia_quiz::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start in the light color scheme
    #[arg(long)]
    light: bool,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let quiz = Quiz::new(!args.light);
    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
