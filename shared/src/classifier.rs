use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::sync::OnceCell;

use crate::cell::CellType;
use crate::intake::ImageHandle;
use crate::ranking::{ClassificationResult, Ranking};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("Classifier returned no results")]
    EmptyOutput,
}

/// Non-blocking wait on whatever executor the classifier runs on.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Image classification service.
///
/// Implementations are constructed once and shared by handle. `load` is
/// single-flight: callers that arrive while a load is running wait for it
/// instead of starting another.
#[async_trait(?Send)]
pub trait Classifier {
    async fn load(&self);

    fn is_loaded(&self) -> bool;

    /// Loads first if needed, then returns one result per known label.
    async fn classify(&self, image: &ImageHandle) -> Result<Ranking, ClassifyError>;

    fn model_info(&self) -> ModelInfo;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub architecture: &'static str,
    pub training_images: u32,
    pub accuracy: &'static str,
    pub classes: Vec<CellType>,
    pub processing_time: &'static str,
}

impl ModelInfo {
    pub fn mobilenet_v2() -> Self {
        Self {
            architecture: "MobileNetV2 + Transfer Learning",
            training_images: 12_000,
            accuracy: "95.2%",
            classes: CellType::iter().collect(),
            processing_time: "< 3 seconds",
        }
    }
}

/// Simulated latencies of the stub classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubConfig {
    pub load_delay_ms: u64,
    pub inference_delay_ms: u64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 2000,
            inference_delay_ms: 1500,
        }
    }
}

impl StubConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn inference_delay(&self) -> Duration {
        Duration::from_millis(self.inference_delay_ms)
    }
}

/// Placeholder classifier: waits, then draws randomized confidences.
///
/// Output is non-deterministic. Every call covers all catalog labels, each
/// confidence drawn from the label's `mock_confidence_range`.
pub struct MockClassifier<T> {
    timer: T,
    config: StubConfig,
    loaded: OnceCell<()>,
}

impl<T: Timer> MockClassifier<T> {
    pub fn new(timer: T, config: StubConfig) -> Self {
        Self {
            timer,
            config,
            loaded: OnceCell::new(),
        }
    }

    fn synthesize(&self) -> Vec<ClassificationResult> {
        let mut rng = rand::thread_rng();
        CellType::iter()
            .map(|cell| {
                let (base, spread) = cell.mock_confidence_range();
                ClassificationResult::new(cell, base + rng.r#gen::<f32>() * spread)
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl<T: Timer> Classifier for MockClassifier<T> {
    async fn load(&self) {
        self.loaded
            .get_or_init(|| async {
                log::info!("Loading blood cell classification model...");
                self.timer.sleep(self.config.load_delay()).await;
                log::info!("Classification model loaded");
            })
            .await;
    }

    fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    async fn classify(&self, image: &ImageHandle) -> Result<Ranking, ClassifyError> {
        self.load().await;

        log::info!("Running inference on {}", image.name());
        self.timer.sleep(self.config.inference_delay()).await;

        let ranking = Ranking::from_results(self.synthesize()).ok_or(ClassifyError::EmptyOutput)?;
        log::debug!(
            "Top prediction for {}: {} ({:.1}%)",
            image.name(),
            ranking.top().label,
            ranking.top().confidence
        );
        Ok(ranking)
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo::mobilenet_v2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{ImageSource, submit};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::time::Instant;

    #[derive(Clone, Default)]
    struct RecordingTimer {
        waits: Rc<RefCell<Vec<Duration>>>,
    }

    impl Timer for RecordingTimer {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            self.waits.borrow_mut().push(duration);
            tokio::time::sleep(duration)
        }
    }

    fn sample() -> ImageHandle {
        submit(ImageSource::Sample("Neutrophil".into()), |_| {}).unwrap()
    }

    fn waits_of(timer: &RecordingTimer, duration: Duration) -> usize {
        timer.waits.borrow().iter().filter(|d| **d == duration).count()
    }

    #[tokio::test(start_paused = true)]
    async fn classify_covers_every_label_in_rank_order() {
        let classifier = MockClassifier::new(RecordingTimer::default(), StubConfig::default());
        let ranking = classifier.classify(&sample()).await.unwrap();

        assert_eq!(ranking.len(), 4);
        let mut labels: Vec<CellType> = ranking.iter().map(|r| r.label).collect();
        labels.sort();
        assert_eq!(labels, CellType::iter().collect::<Vec<_>>());

        for pair in ranking.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        for result in ranking.iter() {
            let (base, spread) = result.label.mock_confidence_range();
            assert!(result.confidence >= base && result.confidence <= base + spread);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_classify_pays_for_the_load() {
        let classifier = MockClassifier::new(RecordingTimer::default(), StubConfig::default());
        assert!(!classifier.is_loaded());

        let start = Instant::now();
        classifier.classify(&sample()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(3500));
        assert!(classifier.is_loaded());

        let start = Instant::now();
        classifier.classify(&sample()).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1500) && elapsed < Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_calls_share_one_load() {
        let timer = RecordingTimer::default();
        let config = StubConfig::default();
        let classifier = MockClassifier::new(timer.clone(), config);
        let image = sample();

        let (a, b, ()) = futures::join!(
            classifier.classify(&image),
            classifier.classify(&image),
            classifier.load()
        );
        assert!(a.is_ok() && b.is_ok());

        assert_eq!(waits_of(&timer, config.load_delay()), 1);
        assert_eq!(waits_of(&timer, config.inference_delay()), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_load_is_not_repeated() {
        let timer = RecordingTimer::default();
        let classifier = MockClassifier::new(timer.clone(), StubConfig::default());

        classifier.load().await;
        classifier.load().await;
        classifier.classify(&sample()).await.unwrap();

        assert_eq!(waits_of(&timer, Duration::from_millis(2000)), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn works_behind_a_trait_object() {
        let config = StubConfig {
            load_delay_ms: 10,
            inference_delay_ms: 5,
        };
        let classifier: Rc<dyn Classifier> =
            Rc::new(MockClassifier::new(RecordingTimer::default(), config));

        let ranking = classifier.classify(&sample()).await.unwrap();
        assert_eq!(ranking.len(), classifier.model_info().classes.len());
    }

    #[test]
    fn stub_config_defaults() {
        let config = StubConfig::default();
        assert_eq!(config.load_delay(), Duration::from_secs(2));
        assert_eq!(config.inference_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn model_info_lists_catalog_classes() {
        let info = ModelInfo::mobilenet_v2();
        assert_eq!(info.classes, CellType::iter().collect::<Vec<_>>());
        assert_eq!(info.training_images, 12_000);
    }
}
