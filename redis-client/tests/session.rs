use bytes::Bytes;
use redis_client::{Credential, Endpoint, Error, Session};

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Spawns a scripted server. For each `(expect, reply)` pair it reads exactly
/// the expected raw command bytes, asserts them and answers with the canned
/// reply. The socket is dropped once the script runs out.
async fn scripted_server(script: Vec<(&'static [u8], &'static [u8])>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        for (expect, reply) in script {
            let mut request = vec![0u8; expect.len()];
            socket.read_exact(&mut request).await.unwrap();
            assert_eq!(expect, &request[..]);

            socket.write_all(reply).await.unwrap();
        }
    });

    addr
}

async fn connect(addr: SocketAddr) -> Session {
    let endpoint = Endpoint::new(addr.ip(), addr.port());
    Session::connect(&endpoint).await.unwrap()
}

#[tokio::test]
async fn authenticated_set_get_round_trip() {
    let addr = scripted_server(vec![
        (b"*2\r\n$4\r\nauth\r\n$4\r\ntest\r\n", b"+OK\r\n"),
        (
            b"*3\r\n$3\r\nset\r\n$8\r\nkey_demo\r\n$5\r\nhello\r\n",
            b"+OK\r\n",
        ),
        (b"*2\r\n$3\r\nget\r\n$8\r\nkey_demo\r\n", b"$5\r\nhello\r\n"),
    ])
    .await;

    let mut session = connect(addr).await;
    session
        .authenticate(&Credential::new("test"))
        .await
        .unwrap();

    session.set("key_demo", "hello".into()).await.unwrap();

    let got = session.get("key_demo").await.unwrap().unwrap();
    assert_eq!(b"hello", &got[..]);
}

#[tokio::test]
async fn get_of_unwritten_key_is_absent_not_an_error() {
    let addr = scripted_server(vec![(
        b"*2\r\n$3\r\nget\r\n$7\r\nmissing\r\n",
        b"$-1\r\n",
    )])
    .await;

    let mut session = connect(addr).await;
    let got = session.get("missing").await.unwrap();
    assert!(got.is_none());
}

#[tokio::test]
async fn rejected_credential_is_an_authentication_error() {
    let addr = scripted_server(vec![(
        b"*2\r\n$4\r\nauth\r\n$5\r\nwrong\r\n",
        b"-ERR invalid password\r\n",
    )])
    .await;

    let mut session = connect(addr).await;
    let err = session
        .authenticate(&Credential::new("wrong"))
        .await
        .unwrap_err();

    match err {
        Error::Authentication(msg) => assert_eq!("ERR invalid password", msg),
        other => panic!("expected Authentication error, got: {}", other),
    }
}

#[tokio::test]
async fn connect_to_dead_port_is_a_connection_error() {
    // Bind to grab a free port, then drop the listener so nothing accepts.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = Endpoint::new(addr.ip(), addr.port());
    let err = Session::connect(&endpoint).await.unwrap_err();

    assert!(matches!(err, Error::Connection(_)), "got: {}", err);
}

#[tokio::test]
async fn server_error_reply_during_set_is_a_store_operation_error() {
    let addr = scripted_server(vec![(
        b"*3\r\n$3\r\nset\r\n$5\r\nhello\r\n$5\r\nworld\r\n",
        b"-ERR READONLY You can't write against a read only replica.\r\n",
    )])
    .await;

    let mut session = connect(addr).await;
    let err = session.set("hello", "world".into()).await.unwrap_err();

    match err {
        Error::StoreOperation(msg) => assert!(msg.starts_with("ERR READONLY")),
        other => panic!("expected StoreOperation error, got: {}", other),
    }
}

#[tokio::test]
async fn server_closing_before_replying_is_a_store_operation_error() {
    // Empty script: the server accepts and immediately drops the socket.
    let addr = scripted_server(vec![]).await;

    let mut session = connect(addr).await;
    let err = session.get("hello").await.unwrap_err();

    assert!(matches!(err, Error::StoreOperation(_)), "got: {}", err);
}

#[tokio::test]
async fn ping_pong_without_message() {
    let addr = scripted_server(vec![(b"*1\r\n$4\r\nping\r\n", b"+PONG\r\n")]).await;

    let mut session = connect(addr).await;
    let pong = session.ping(None).await.unwrap();
    assert_eq!(b"PONG", &pong[..]);
}

#[tokio::test]
async fn ping_pong_with_message() {
    let addr = scripted_server(vec![(
        b"*2\r\n$4\r\nping\r\n$11\r\nhello world\r\n",
        b"$11\r\nhello world\r\n",
    )])
    .await;

    let mut session = connect(addr).await;
    let pong = session
        .ping(Some(Bytes::from("hello world")))
        .await
        .unwrap();
    assert_eq!(b"hello world", &pong[..]);
}
