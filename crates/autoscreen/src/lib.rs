/*!
autoscreen - main display geometry queries

```no_run
use autoscreen::{Screen, FixedDisplay};

// Query the OS (nothing is cached)
let screen = Screen::new();
let size = screen.get_size()?;
assert!(screen.point_visible((0, 0)) || size.width == 0);
assert!(!screen.point_visible((-1, 0)));

// Headless collaborator for tests
let headless = Screen::with_platform(FixedDisplay::new((800, 600)));
assert!(!headless.point_visible((800, 0)));
# Ok::<(), autoscreen::ScreenError>(())
```
*/

mod platform;
mod screen;

mod types;
pub use types::*;

pub use crate::platform::{CurrentPlatform, DisplayPlatform, FixedDisplay};
pub use crate::screen::{get_size, point_visible, Screen, ScreenBuilder};
