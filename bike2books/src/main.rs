use bike2books::app::Bike2BooksApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = Bike2BooksApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bike2books: {e}");
            std::process::exit(1);
        }
    }
}
