pub mod admin_users;
pub mod clinic;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

pub use admin_users::AdminUsers;
pub use clinic::{
    Activity, Appointments, Dashboard, Doctors, PatientDetail, Patients, Reports, Settings,
};
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
