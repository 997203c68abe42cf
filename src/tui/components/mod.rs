//! # TUI Components
//!
//! All UI components for the corrector screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from application state:
//! - `TitleBar`: app name, selected mode, status
//! - `SubmitButton`: the "Correct mistakes" control
//! - `ReviewBanner`: summary and annotation list
//! - `Toast`: the current notice
//! - `ProgressBar`: startup indicator
//!
//! ### Stateful Components (Event-Driven)
//!
//! Own local state and emit events:
//! - `InputBox`: the draft editor
//! - `ModePicker`: mode selection overlay (state in `ModePickerState`)
//! - `ResultPanel`: scrollable corrected text (state in `ScrollViewState`)
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! TitleBar::new(app.selected_mode.clone(), app.status_message.clone())
//!     .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── input_box/       (editor, cursor, wrapping math)
//! ├── submit_button.rs
//! ├── mode_picker.rs
//! ├── review_banner.rs
//! ├── result_panel.rs
//! ├── progress.rs
//! └── toast.rs
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod mode_picker;
pub use mode_picker::{ModePicker, ModePickerEvent, ModePickerState};
pub mod progress;
pub use progress::ProgressBar;
pub mod result_panel;
pub use result_panel::ResultPanel;
pub mod review_banner;
pub use review_banner::ReviewBanner;
pub mod submit_button;
pub use submit_button::SubmitButton;
pub mod toast;
pub use toast::Toast;
