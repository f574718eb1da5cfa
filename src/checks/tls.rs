//! TLS certificate probe
//!
//! Connects to a host, performs a TLS handshake and reads the certificate
//! chain exactly as the server presented it. Verification against the
//! Mozilla root store is enforced unless the options explicitly skip it.

use crate::certificate::{records_from_chain, CertificateRecord};
use crate::config::{Host, Options};
use crate::utils::ProbeError;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::time::Instant;
use tokio_rustls::TlsConnector;

/// A certificate verifier that accepts any certificate.
/// Only installed when TLS verification is explicitly skipped.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
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

/// Reads certificate chains from remote hosts
pub struct TlsProbe {
    options: Options,
    connector: TlsConnector,
}

impl TlsProbe {
    /// Create a probe for the given options
    pub fn new(options: Options) -> Self {
        // Ensure a default crypto provider is installed before building configs
        let _ = rustls::crypto::ring::default_provider().install_default();

        let config = if options.skip_tls_verify() {
            tracing::warn!("TLS certificate verification is disabled (insecure)");
            ClientConfig::builder()
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
                .with_no_client_auth()
        } else {
            let root_store =
                rustls::RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
            ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth()
        };

        Self {
            options,
            connector: TlsConnector::from(Arc::new(config)),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Retrieve the certificate records presented by `host`
    ///
    /// One deadline covers connect and handshake together; a zero timeout
    /// waits indefinitely. The socket lives only for the duration of this
    /// call and is closed on every return path. On error no records are
    /// returned.
    pub async fn connect(&self, host: &Host) -> Result<Vec<CertificateRecord>, ProbeError> {
        let target = host.to_string();
        let deadline =
            (self.options.timeout_secs() > 0).then(|| Instant::now() + self.options.timeout());
        let timed_out = |stage: &'static str| ProbeError::Timeout {
            host: target.clone(),
            stage,
            seconds: self.options.timeout_secs(),
        };

        let stream = before_deadline(deadline, open_tcp(host))
            .await
            .ok_or_else(|| timed_out("TCP connect"))??;

        let server_name = ServerName::try_from(host.address.clone()).map_err(|_| {
            ProbeError::InvalidServerName {
                name: host.address.clone(),
            }
        })?;

        tracing::debug!(host = %host, "starting TLS handshake");
        let tls_stream = before_deadline(deadline, self.connector.connect(server_name, stream))
            .await
            .ok_or_else(|| timed_out("TLS handshake"))?
            .map_err(|e| ProbeError::Handshake {
                host: target.clone(),
                message: e.to_string(),
            })?;

        let (_, client_connection) = tls_stream.get_ref();
        let chain = match client_connection.peer_certificates() {
            Some(certs) if !certs.is_empty() => certs,
            _ => return Err(ProbeError::NoCertificates { host: target }),
        };
        tracing::debug!(host = %host, chain_length = chain.len(), "received certificate chain");

        records_from_chain(chain, host, &self.options)
    }
}

/// Await `fut`, giving up at `deadline` if there is one
async fn before_deadline<F: Future>(deadline: Option<Instant>, fut: F) -> Option<F::Output> {
    match deadline {
        Some(deadline) => tokio::time::timeout_at(deadline, fut).await.ok(),
        None => Some(fut.await),
    }
}

/// Resolve the host and connect to the first address that accepts
async fn open_tcp(host: &Host) -> Result<TcpStream, ProbeError> {
    let target = host.to_string();
    let addrs: Vec<_> = tokio::net::lookup_host((host.address.as_str(), host.port))
        .await
        .map_err(|e| ProbeError::Resolve {
            host: target.clone(),
            message: e.to_string(),
        })?
        .collect();

    if addrs.is_empty() {
        return Err(ProbeError::Resolve {
            host: target,
            message: "no addresses found".to_string(),
        });
    }

    let mut last_error = None;
    for addr in addrs {
        tracing::debug!(host = %host, %addr, "connecting");
        match TcpStream::connect(addr).await {
            Ok(stream) => return Ok(stream),
            Err(e) => last_error = Some(e),
        }
    }

    Err(match last_error {
        Some(e) if e.kind() == io::ErrorKind::ConnectionRefused => {
            ProbeError::ConnectionRefused { host: target }
        }
        Some(e) => ProbeError::Connect {
            host: target,
            message: e.to_string(),
        },
        None => ProbeError::Connect {
            host: target,
            message: "no address accepted the connection".to_string(),
        },
    })
}
