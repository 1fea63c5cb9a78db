pub static SITE_NAME: &str = "Clinicboard";
