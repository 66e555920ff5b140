use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::error::RequestError;
use crate::middleware::logging::{log_connection, log_request, log_response};
use crate::protocol::request::parse_request_line;
use crate::protocol::{RequestContext, error_response, handle_request};
use crate::server::config::ServerConfig;
use crate::storage::resolve_library_root;

pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
    context: Arc<RequestContext>,
}

impl Server {
    pub async fn new(config: ServerConfig) -> Self {
        let socket = config.listen_socket();

        let listener = match TcpListener::bind(&socket).await {
            Ok(listener) => {
                info!("Server bound to {}", socket);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", socket, e);
                panic!("Server startup failed on socket {}: {}", socket, e);
            }
        };

        // The library root must exist before any request is served
        let library_root = match resolve_library_root(&config.library_roots) {
            Ok(root) => root,
            Err(e) => {
                error!("Failed to resolve library root: {}", e);
                panic!("Server startup failed resolving library root: {}", e);
            }
        };

        Self {
            listener,
            config: Arc::new(config),
            context: Arc::new(RequestContext { library_root }),
        }
    }

    pub async fn start(&self) {
        info!(
            "Serving document library {} on {}",
            self.context.library_root.display(),
            self.config.listen_socket()
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let config = Arc::clone(&self.config);
                    let context = Arc::clone(&self.context);

                    // Spawn a task for each connection so the accept loop
                    // never blocks on a slow client
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, addr, config, context).await {
                            warn!("Failed to handle connection from {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

/// Handles one connection: reads a single request, dispatches it, writes the
/// response, and closes.
async fn handle_connection(
    stream: TcpStream,
    client_addr: SocketAddr,
    config: Arc<ServerConfig>,
    context: Arc<RequestContext>,
) -> Result<(), std::io::Error> {
    log_connection(&client_addr);

    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();

    // Request line
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        info!("Connection closed by client {}", client_addr);
        return Ok(());
    }

    if line.len() > config.max_request_line {
        let response =
            error_response(RequestError::RequestLineTooLong(config.max_request_line).into());
        write_half.write_all(&response.to_bytes()).await?;
        return write_half.flush().await;
    }

    let request = match parse_request_line(&line) {
        Ok(request) => request,
        Err(e) => {
            let response = error_response(e.into());
            write_half.write_all(&response.to_bytes()).await?;
            return write_half.flush().await;
        }
    };

    log_request(&client_addr, &request.method, &request.path);

    // Drain headers up to the blank line; their content is not needed
    let mut header_count = 0usize;
    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 || line == "\r\n" || line == "\n" {
            break;
        }
        header_count += 1;
        if header_count > config.max_headers {
            let response = error_response(RequestError::TooManyHeaders(config.max_headers).into());
            write_half.write_all(&response.to_bytes()).await?;
            return write_half.flush().await;
        }
    }

    let response = handle_request(&context, &request);
    log_response(&client_addr, response.status);

    write_half.write_all(&response.to_bytes()).await?;
    write_half.flush().await
}
