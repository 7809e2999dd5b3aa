//! codesamples: extract tagged code samples from source files, store them in
//! per-service documents, and generate tagged sample source from service
//! models.
//!
//! Sample markup, one tag per line:
//!
//! ```text
//! //BEGIN_SAMPLE:AmazonS3.PutObject
//! //TITLE:Upload an object
//! //DESCRIPTION:Uploads a file to a bucket.
//! s3.putObject(request);
//! //BEGIN_HIDDEN
//! cleanup();
//! //END_HIDDEN
//! //END_SAMPLE
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod store;
pub mod text;

pub use error::{MarkupViolation, Result, SampleError};
pub use model::{RetrievedSample, SampleRecord};
pub use parser::MarkupParser;
pub use store::SampleReader;
