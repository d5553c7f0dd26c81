//! Prop-driven widgets for the exam-booking wizard. The pages own fetch
//! and navigation; these only render data and raise callbacks, which keeps
//! them renderable in server-side tests.

pub mod confirmation;
pub mod exam_picker;
pub mod price_summary;
pub mod slot_grid;

pub use confirmation::ConfirmationPanel;
pub use exam_picker::ExamPicker;
pub use price_summary::PriceSummary;
pub use slot_grid::SlotGrid;
