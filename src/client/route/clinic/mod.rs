pub mod activity;
pub mod appointments;
pub mod component;
pub mod dashboard;
pub mod doctors;
pub mod patients;
pub mod reports;
pub mod settings;

pub use activity::Activity;
pub use appointments::Appointments;
pub use dashboard::Dashboard;
pub use doctors::Doctors;
pub use patients::{PatientDetail, Patients};
pub use reports::Reports;
pub use settings::Settings;

use dioxus::prelude::*;

use crate::client::router::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum ClinicTab {
    Dashboard,
    Appointments,
    Patients,
    Doctors,
    Reports,
    Settings,
    Activity,
}

#[component]
pub fn ClinicTabs(clinic_id: i32, active_tab: ClinicTab) -> Element {
    rsx! (
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-6 overflow-x-auto",
            Link {
                to: Route::Dashboard { clinic_id },
                role: "tab",
                class: if active_tab == ClinicTab::Dashboard { "tab tab-active" } else { "tab" },
                "Dashboard"
            }
            Link {
                to: Route::Appointments { clinic_id },
                role: "tab",
                class: if active_tab == ClinicTab::Appointments { "tab tab-active" } else { "tab" },
                "Appointments"
            }
            Link {
                to: Route::Patients { clinic_id },
                role: "tab",
                class: if active_tab == ClinicTab::Patients { "tab tab-active" } else { "tab" },
                "Patients"
            }
            Link {
                to: Route::Doctors { clinic_id },
                role: "tab",
                class: if active_tab == ClinicTab::Doctors { "tab tab-active" } else { "tab" },
                "Doctors"
            }
            Link {
                to: Route::Reports { clinic_id },
                role: "tab",
                class: if active_tab == ClinicTab::Reports { "tab tab-active" } else { "tab" },
                "Reports"
            }
            Link {
                to: Route::Settings { clinic_id },
                role: "tab",
                class: if active_tab == ClinicTab::Settings { "tab tab-active" } else { "tab" },
                "Settings"
            }
            Link {
                to: Route::Activity { clinic_id },
                role: "tab",
                class: if active_tab == ClinicTab::Activity { "tab tab-active" } else { "tab" },
                "Activity"
            }
        }
    )
}
