pub mod cell;
pub mod classifier;
pub mod intake;
pub mod ranking;
pub mod session;

pub use cell::{CellProfile, CellType, cell_profiles};
pub use classifier::{Classifier, ClassifyError, MockClassifier, ModelInfo, StubConfig, Timer};
pub use intake::{ImageHandle, ImageSource, IntakeError};
pub use ranking::{ClassificationResult, ConfidenceLevel, HIGH_CONFIDENCE_THRESHOLD, Ranking};
pub use session::{AnalysisRequest, AnalysisTicket, Phase, Session, SessionState};
pub use strum::IntoEnumIterator;
