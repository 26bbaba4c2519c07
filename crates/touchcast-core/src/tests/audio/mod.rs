mod capture;
mod microphone;
