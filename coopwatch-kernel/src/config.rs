use crate::error::KernelError;
use crate::shell::{PanelId, ReportPeriod, ReportType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct KernelConfig {
    pub http: HttpConf,
    pub dashboard: DashboardConf,
    pub log: LogConf,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HttpConf {
    pub bind: String, // ex: "0.0.0.0:8080"
}

impl Default for HttpConf {
    fn default() -> Self {
        Self { bind: "0.0.0.0:8080".into() }
    }
}

/// Défauts de sélection du dashboard
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DashboardConf {
    pub default_tab: PanelId,
    pub default_report_type: ReportType,
    pub default_period: ReportPeriod,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConf {
    pub filter: String, // surchargé par RUST_LOG
}

impl Default for LogConf {
    fn default() -> Self {
        Self { filter: "coopwatch_kernel=info".into() }
    }
}

/// Lit et parse un fichier de config. Un fichier vide donne la config par défaut.
pub async fn read_config<P: AsRef<Path>>(path: P) -> Result<KernelConfig, KernelError> {
    let txt = fs::read_to_string(path).await?;
    if txt.trim().is_empty() {
        return Ok(KernelConfig::default());
    }
    Ok(serde_yaml::from_str(&txt)?)
}

/// Charge `coopwatch.yaml` (ou `COOPWATCH_KERNEL_CONFIG`) ; ne fait jamais
/// échouer le démarrage : fichier absent ou invalide → config par défaut.
pub async fn load_config() -> KernelConfig {
    let path = std::env::var("COOPWATCH_KERNEL_CONFIG").unwrap_or_else(|_| "coopwatch.yaml".into());
    load_config_from(&path).await
}

pub async fn load_config_from(path: &str) -> KernelConfig {
    if !Path::new(path).exists() {
        warn!(path, "no config file, using defaults");
        return KernelConfig::default();
    }
    read_config(path).await.unwrap_or_else(|e| {
        warn!(path, error = %e, "invalid config, using defaults");
        KernelConfig::default()
    })
}
