mod categoria;
mod health;
mod post;
mod producto;

pub use categoria::*;
pub use health::*;
pub use post::*;
pub use producto::*;
