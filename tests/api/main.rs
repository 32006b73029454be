mod contact;
mod helpers;
mod services;
