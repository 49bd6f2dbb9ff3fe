pub mod context;
pub mod host;
pub mod traits;
pub mod types;

pub use context::{
    ErasedHostContextProvider, HostContextProvider, PageContext, StaticHostContext,
    WebPartContext,
};
pub use host::WebPartHost;
pub use traits::{ErasedWebPart, WebPart};
pub use types::{Theme, WebPartError, WebPartManifest, WebPartState};
