use crate::config::Config;
use crate::document::CertificateAssembler;
use crate::error::Result;
use crate::issuer::IssuerProfile;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assembler: Arc<CertificateAssembler>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let issuer = match &config.issuer_profile {
            Some(path) => {
                tracing::info!("Loading issuer profile from {}", path.display());
                IssuerProfile::from_json_file(path)?
            }
            None => IssuerProfile::default(),
        };

        Ok(Self {
            config: Arc::new(config),
            assembler: Arc::new(CertificateAssembler::new(issuer)),
        })
    }
}
