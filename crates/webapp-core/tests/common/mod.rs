pub mod favicon_server;
