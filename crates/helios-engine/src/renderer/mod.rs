pub mod canvas;
pub mod pixmap;
pub mod software;

#[cfg(test)]
pub mod testing;
