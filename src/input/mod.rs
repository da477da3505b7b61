//! Pointer input handling for the box surface.
//!
//! Each submodule adds one group of event handlers to
//! [`BoxEngine`](crate::engine::BoxEngine). Hosts wire them once:
//!
//! | Host event                    | Handler                 |
//! |-------------------------------|-------------------------|
//! | window pointer move           | `on_pointer_move`       |
//! | window pointer down           | `on_pointer_down`       |
//! | window pointer up             | `on_pointer_up`         |
//! | box pointer down              | `on_box_pointer_down`   |
//! | box click                     | `on_box_click`          |
//! | box pointer enter / leave     | `on_box_hover_enter` / `on_box_hover_leave` |
//!
//! Pointer up must be delivered from the window, not the box element, or a
//! gesture that ends outside a box never finishes.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `pointer` - Pointer position tracker
//! - `mouse_down` - Draw start, drag start, hit-tested press
//! - `drag` - Candidate resize and box drag on move
//! - `mouse_up` - Commit, drag end, cancel
//! - `click` - Quadrant split
//! - `hover` - Hovered box for the cursor mode

mod click;
mod drag;
mod hover;
mod mouse_down;
mod mouse_up;
mod pointer;
mod state;

pub use pointer::PointerTracker;
pub use state::InputState;
