use std::{
    env,
    io::{BufReader, Write},
    net::{TcpListener, TcpStream},
    sync::{atomic::AtomicUsize, Arc},
    thread,
};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bumblebee::{
    server::{ConnectionSlot, Response, ServerState},
    EngineConfig,
};

const DEFAULT_ADDR: &str = "127.0.0.1:0";
const MAX_CONNECTIONS: usize = 64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let mut args = env::args().skip(1);
    let addr = args.next().unwrap_or_else(|| DEFAULT_ADDR.to_string());
    let config = match args.next() {
        Some(path) => {
            info!("Loading engine config from {}", path);
            EngineConfig::from_yaml_file(&path)?
        }
        None => EngineConfig::default(),
    };

    let listener = TcpListener::bind(&addr)?;
    println!("PORT={}", listener.local_addr()?.port());
    info!("Listening on {}", listener.local_addr()?);

    let state = ServerState::new(config);
    let active = Arc::new(AtomicUsize::new(0));
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => match ConnectionSlot::acquire(&active, MAX_CONNECTIONS) {
                Some(slot) => {
                    thread::spawn(move || {
                        handle_connection(state, stream);
                        drop(slot);
                    });
                }
                None => refuse_connection(stream),
            },
            Err(e) => error!("Failed to accept connection: {}", e),
        }
    }

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so stdout carries only the PORT line.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn refuse_connection(mut stream: TcpStream) {
    warn!("Refusing connection, {} already active", MAX_CONNECTIONS);
    let response = Response::error("Server is at its connection limit");
    if let Ok(line) = serde_json::to_string(&response) {
        let _ = writeln!(stream, "{}", line);
    }
}

fn handle_connection(state: ServerState, stream: TcpStream) {
    let peer = stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    info!("Client connected: {}", peer);

    let reader = match stream.try_clone() {
        Ok(clone) => BufReader::new(clone),
        Err(e) => {
            error!("Failed to clone stream for {}: {}", peer, e);
            return;
        }
    };

    if let Err(e) = state.serve(reader, &stream) {
        error!("Connection {} ended with error: {}", peer, e);
    }
    info!("Client disconnected: {}", peer);
}
