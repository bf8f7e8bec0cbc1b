mod account_credentials_list;
mod account_credentials_remove;
mod account_password_get;
mod account_password_update;

pub use self::{
    account_credentials_list::account_credentials_list,
    account_credentials_remove::account_credentials_remove,
    account_password_get::account_password_get,
    account_password_update::account_password_update,
};
