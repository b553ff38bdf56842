pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod model;
pub mod window;

pub use config::{Direction, EngineConfig, LayoutConfig, WindowConfig};
pub use controller::{
    ControllerState, DagController, FetchDisposition, FetchRequest, FetchTicket,
};
pub use error::{FetchError, WindowError};
pub use layout::{DanglingTip, Edge, Frame, HeightBucket, LayoutBlock, compute_frame};
pub use model::{BlockRecord, BlockType};
pub use window::Window;
