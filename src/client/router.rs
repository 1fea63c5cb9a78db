use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    Activity, AdminUsers, Appointments, Dashboard, Doctors, Home, Login, NotFound, PatientDetail,
    Patients, Register, Reports, Settings,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[layout(RequiresLoggedIn)]
    #[route("/")]
    Home {},

    #[nest("/clinic/:clinic_id")]
        #[route("/")]
        Dashboard { clinic_id: i32 },

        #[route("/appointments")]
        Appointments { clinic_id: i32 },

        #[route("/patients")]
        Patients { clinic_id: i32 },

        #[route("/patients/:patient_id")]
        PatientDetail { clinic_id: i32, patient_id: i32 },

        #[route("/doctors")]
        Doctors { clinic_id: i32 },

        #[route("/reports")]
        Reports { clinic_id: i32 },

        #[route("/settings")]
        Settings { clinic_id: i32 },

        #[route("/activity")]
        Activity { clinic_id: i32 },
    #[end_nest]
    #[end_layout]

    #[layout(RequiresAdmin)]
    #[route("/admin/users")]
    AdminUsers {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
