//! Data model types for window and corner quotes.

mod corner;
mod document;
mod plan;
mod preset;
mod raw_number;
mod window;

pub use corner::{
    Block, BlockKind, BlockPlacement, BlockSpec, Corner, CornerResult, CornerSpec, StackLayout,
};
pub use document::QuoteDocument;
pub use plan::{CutGroup, CuttingPlan, GroupPlan, MaterialRole, StockBar};
pub use preset::{builtin_presets, find_preset, Preset};
pub use raw_number::{raw, RawNumber};
pub use window::{
    Accessory, AccessoryQuantity, AccessorySpec, BarSpec, BarStock, Cornice, CorniceSpec,
    FrameMode, MaterialQuantity, Window, WindowResult, WindowSpec,
};
