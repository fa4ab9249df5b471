mod categoria;
mod producto;

pub use categoria::*;
pub use producto::*;
