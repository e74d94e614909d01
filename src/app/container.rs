use std::sync::Arc;

use tracing::info;

use crate::adapters::{FfmpegExecAdapter, FfprobeAdapter};
use crate::app::split_interactor::SplitInteractor;
use crate::config_initialization::{AppConfig, ProbeBackend};
use crate::error::SplitResult;
use crate::ports::{ExecutePort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn split_interactor(&self) -> Arc<SplitInteractor>;
}

pub struct DefaultAppContainer {
    split_interactor: Arc<SplitInteractor>,
}

impl DefaultAppContainer {
    /// Wire the production adapters selected by `config`
    pub fn from_config(config: &AppConfig) -> SplitResult<Self> {
        let probe_port = probe_port(config)?;
        let execute_port: Arc<dyn ExecutePort> =
            Arc::new(FfmpegExecAdapter::new(config.tools.ffmpeg.clone()));
        info!(
            probe = probe_port.backend_name(),
            ffmpeg = %config.tools.ffmpeg.display(),
            "Media service ready"
        );

        Ok(Self::with_ports(probe_port, execute_port, config))
    }

    /// Wire explicit ports, e.g. the mock adapters
    pub fn with_ports(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        config: &AppConfig,
    ) -> Self {
        let split_interactor = Arc::new(SplitInteractor::new(
            probe_port,
            execute_port,
            config.encoding.clone(),
            config.partition.zero_length_tail,
        ));
        Self { split_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn split_interactor(&self) -> Arc<SplitInteractor> {
        Arc::clone(&self.split_interactor)
    }
}

fn ffprobe_port(config: &AppConfig) -> Arc<dyn ProbePort> {
    Arc::new(FfprobeAdapter::new(config.tools.ffprobe.clone()))
}

#[cfg(feature = "libav")]
fn probe_port(config: &AppConfig) -> SplitResult<Arc<dyn ProbePort>> {
    match config.tools.probe_backend {
        ProbeBackend::Libav => Ok(Arc::new(crate::adapters::LibavProbeAdapter::new()?)),
        ProbeBackend::Ffprobe => Ok(ffprobe_port(config)),
    }
}

#[cfg(not(feature = "libav"))]
fn probe_port(config: &AppConfig) -> SplitResult<Arc<dyn ProbePort>> {
    if config.tools.probe_backend == ProbeBackend::Libav {
        tracing::warn!("Built without libav support, probing with ffprobe instead");
    }
    Ok(ffprobe_port(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockExecAdapter, MockProbeAdapter};
    use crate::domain::model::TailPolicy;

    #[test]
    fn test_with_ports_applies_config() {
        let mut config = AppConfig::default();
        config.encoding.crf = 30;
        config.partition.zero_length_tail = TailPolicy::Preserve;

        let container = DefaultAppContainer::with_ports(
            Arc::new(MockProbeAdapter::new(10.0)),
            Arc::new(MockExecAdapter::new()),
            &config,
        );
        let interactor = container.split_interactor();
        assert_eq!(interactor.profile().crf, 30);
        assert_eq!(interactor.tail_policy(), TailPolicy::Preserve);
    }

    #[test]
    fn test_from_config_ffprobe_backend() {
        let mut config = AppConfig::default();
        config.tools.probe_backend = ProbeBackend::Ffprobe;
        assert!(DefaultAppContainer::from_config(&config).is_ok());
    }
}
