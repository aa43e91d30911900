pub mod failure_writer;
pub mod js_payload;
pub mod taxonomy_navigator;
pub mod transcoder;
pub mod url_deriver;

pub use failure_writer::FailureWriter;
pub use js_payload::{parse_js_json, strip_js_assignment};
pub use taxonomy_navigator::{TaxonomyNavigator, UnitCases};
pub use transcoder::{output_path, FfmpegTranscoder, Transcoder};
pub use url_deriver::{derive_stream_urls, StreamCandidates, StreamProbe, UrlDeriver};
