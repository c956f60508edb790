mod contains;
mod traits;
