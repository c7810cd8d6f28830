mod common;

use cert_check::config::CheckConfig;
use cert_check::fetch::{self, CertSource};
use cert_check::utils::FetchError;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;

/// Serve TLS with the given certificate on an ephemeral loopback port
async fn spawn_tls_server(cert: &common::TestCert) -> SocketAddr {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let certs = vec![CertificateDer::from(cert.der.clone())];
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(cert.key_der.clone()));
    let config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .expect("server config");
    let acceptor = TlsAcceptor::from(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                if let Ok(tls) = acceptor.accept(stream).await {
                    // hold the session so the client finishes cleanly
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    drop(tls);
                }
            });
        }
    });

    addr
}

#[tokio::test]
async fn test_tcp_fetch_captures_leaf() {
    let cert = common::generate_cert("localhost", -1, 30);
    let addr = spawn_tls_server(&cert).await;

    let source = CertSource::Tcp {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
    };
    let record = fetch::fetch_certificate(&source, &CheckConfig::default())
        .await
        .unwrap();

    assert_eq!(record.not_before, cert.not_before);
    assert_eq!(record.not_after, cert.not_after);
    assert_eq!(record.subject, "localhost");
    assert_eq!(record.locator, format!("tcp://127.0.0.1:{}", addr.port()));
}

#[tokio::test]
async fn test_tcp_fetch_with_servername_override() {
    let cert = common::generate_cert("localhost", -1, 30);
    let addr = spawn_tls_server(&cert).await;

    let config = CheckConfig {
        server_name: Some("localhost".to_string()),
        ..CheckConfig::default()
    };
    let source = CertSource::Tcp {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
    };
    let record = fetch::fetch_certificate(&source, &config).await.unwrap();

    assert_eq!(record.subject, "localhost");
}

#[tokio::test]
async fn test_connection_refused_is_connect_error() {
    // Port 1 is essentially never open on loopback
    let source = CertSource::Tcp {
        host: "127.0.0.1".to_string(),
        port: 1,
    };
    let err = fetch::fetch_certificate(&source, &CheckConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Connect { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_stalled_handshake_is_timeout_not_connect() {
    // Accept the TCP connection but never speak TLS
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((stream, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(stream);
        }
    });

    let config = CheckConfig {
        timeout: Some(Duration::from_millis(300)),
        ..CheckConfig::default()
    };
    let source = CertSource::Tcp {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
    };
    let err = fetch::fetch_certificate(&source, &config).await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_non_tls_server_is_handshake_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let _ = stream.write_all(b"HTTP/1.0 400 Bad Request\r\n\r\n").await;
        }
    });

    let source = CertSource::Tcp {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
    };
    let err = fetch::fetch_certificate(&source, &CheckConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Handshake { .. }), "got {:?}", err);
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_tcp_fetch_public_endpoint() {
    let source = CertSource::parse("tcp://google.com:443").unwrap();
    let record = fetch::fetch_certificate(&source, &CheckConfig::default())
        .await
        .unwrap();

    assert!(!record.subject.is_empty());
}
