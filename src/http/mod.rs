mod client;

pub use client::{AttohttpcClient, HttpClient, HttpResponse, read_body};
