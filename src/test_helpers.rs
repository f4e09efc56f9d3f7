use rocket::local::asynchronous::Client;
use std::net::{IpAddr, Ipv4Addr};

pub(crate) async fn client() -> Client {
    let rocket = crate::rocket().expect("valid rocket instance");
    Client::tracked(rocket).await.expect("valid client")
}

/// Server config bound to loopback on `port`, for tests that open a real socket.
pub(crate) fn loopback_config(port: u16) -> rocket::Config {
    rocket::Config {
        address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port,
        ..crate::server_config()
    }
}

/// A port the OS reported free a moment ago.
pub(crate) fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("ephemeral port")
        .port()
}
