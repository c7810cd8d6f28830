//! Inspection-mode TLS certificate capture
//!
//! Connects over TCP and performs a TLS handshake that accepts any server
//! certificate. The point is extracting the certificate for inspection,
//! including self-signed, expired, or otherwise untrusted ones, so
//! trust-chain verification is deliberately disabled.

use crate::utils::FetchError;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

/// A certificate verifier that accepts any certificate
#[derive(Debug)]
struct InspectionVerifier;

impl ServerCertVerifier for InspectionVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Client config for inspection-mode handshakes
fn inspection_config() -> ClientConfig {
    // Ensure a default crypto provider is installed (needed when multiple
    // providers are available, e.g. when reqwest enables both ring and
    // aws-lc-rs)
    let _ = rustls::crypto::ring::default_provider().install_default();

    ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(InspectionVerifier))
        .with_no_client_auth()
}

/// Connect to `host:port` and return the DER-encoded leaf certificate
/// presented during the handshake.
///
/// `sni` overrides the server-name extension; the target host is used when
/// absent.
pub async fn capture_leaf(host: &str, port: u16, sni: Option<&str>) -> Result<Vec<u8>, FetchError> {
    let target = format!("{}:{}", host, port);

    let stream = TcpStream::connect((host, port))
        .await
        .map_err(|e| FetchError::Connect {
            target: target.clone(),
            message: e.to_string(),
        })?;

    let name = sni.unwrap_or(host);
    let server_name =
        ServerName::try_from(name.to_string()).map_err(|_| FetchError::Handshake {
            target: target.clone(),
            message: format!("invalid server name: {}", name),
        })?;

    let connector = TlsConnector::from(Arc::new(inspection_config()));
    let tls_stream = connector
        .connect(server_name, stream)
        .await
        .map_err(|e| FetchError::Handshake {
            target: target.clone(),
            message: e.to_string(),
        })?;

    let (_, connection) = tls_stream.get_ref();
    connection
        .peer_certificates()
        .and_then(|certs| certs.first())
        .map(|cert| cert.as_ref().to_vec())
        .ok_or(FetchError::NoCertificate { target })
}
