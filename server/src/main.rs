mod broadcaster;
mod protocol;
mod room_manager;
mod web_server;
mod ws_handler;

use clap::Parser;

use common::{log, logger};

use broadcaster::Broadcaster;
use room_manager::RoomManager;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    #[arg(long, default_value_t = 5000)]
    port: u16,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Relay".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let room_manager = RoomManager::new();
    let broadcaster = Broadcaster::new();

    web_server::run_web_server(args.port, room_manager, broadcaster).await;

    log!("Relay shut down gracefully");
}
