mod app;
mod config;
mod engine;
mod metadata;
mod playlist;
mod poller;
mod runtime;
mod transport;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
