pub mod blink;
