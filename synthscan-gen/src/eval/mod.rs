mod benchmark;
mod sequence_matcher;
mod word_accuracy;

#[doc(inline)]
pub use benchmark::{EngineScore, OcrEngine, TranscriptEngine, run_benchmark};
#[doc(inline)]
pub use sequence_matcher::{Match, SequenceMatcher};
#[doc(inline)]
pub use word_accuracy::{normalize_words, word_accuracy};
