pub mod kittens;
