mod envelope;
mod operations;
