//! Path parsing and role-gated view selection.
//!
//! Routing is two pure functions: [`parse_path`] turns a location path into a
//! typed [`Route`], and [`select_view`] decides which [`View`] actually
//! renders given the viewer's role. Keeping the gate in one total function
//! means there is no way to add a protected route and forget its role check.

use crate::domain::ids::UserId;
use crate::domain::Role;

/// A location the app can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Patient landing page, also the fallback for denied access
    Home,
    /// Symptom self-assessment flow
    Assessment,
    /// Patient education library
    Education,
    /// Medication reminder list
    Reminders,
    /// Doctor's patient roster
    DoctorDashboard,
    /// One patient's record, as seen by their doctor
    DoctorPatient { patient_id: UserId },
    /// Operator panel
    Admin,
    /// Anything that matched no route
    NotFound,
}

/// What actually renders for a [`Route`] and a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Assessment,
    Education,
    Reminders,
    DoctorDashboard,
    DoctorPatient { patient_id: UserId },
    AdminPanel,
    NotFound,
}

/// Parses a location path into a [`Route`].
///
/// Query strings and fragments are ignored; repeated and trailing slashes
/// collapse. Unknown paths and malformed parameters (an empty patient id)
/// parse to [`Route::NotFound`] rather than failing.
pub fn parse_path(path: &str) -> Route {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Route::Home,
        ["assessment"] => Route::Assessment,
        ["education"] => Route::Education,
        ["reminders"] => Route::Reminders,
        ["doctor"] => Route::DoctorDashboard,
        ["doctor", "patient", id] => match UserId::new(*id) {
            Ok(patient_id) => Route::DoctorPatient { patient_id },
            Err(_) => Route::NotFound,
        },
        ["admin"] => Route::Admin,
        _ => Route::NotFound,
    }
}

/// Decides what to render for a route given the viewer's role.
///
/// Doctor routes require [`Role::Doctor`], the admin route requires
/// [`Role::Admin`]. Denied access falls back to the home view instead of an
/// error page; the patient-facing app never explains what it is hiding.
pub fn select_view(route: &Route, role: Option<Role>) -> View {
    match route {
        Route::Home => View::Home,
        Route::Assessment => View::Assessment,
        Route::Education => View::Education,
        Route::Reminders => View::Reminders,
        Route::DoctorDashboard => {
            if role == Some(Role::Doctor) {
                View::DoctorDashboard
            } else {
                View::Home
            }
        }
        Route::DoctorPatient { patient_id } => {
            if role == Some(Role::Doctor) {
                View::DoctorPatient {
                    patient_id: patient_id.clone(),
                }
            } else {
                View::Home
            }
        }
        Route::Admin => {
            if role == Some(Role::Admin) {
                View::AdminPanel
            } else {
                View::Home
            }
        }
        Route::NotFound => View::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("/", Route::Home ; "root")]
    #[test_case("", Route::Home ; "empty")]
    #[test_case("/assessment", Route::Assessment ; "assessment")]
    #[test_case("/education/", Route::Education ; "trailing slash")]
    #[test_case("/reminders?from=push", Route::Reminders ; "query string ignored")]
    #[test_case("/doctor", Route::DoctorDashboard ; "doctor dashboard")]
    #[test_case("/admin#users", Route::Admin ; "fragment ignored")]
    #[test_case("//education", Route::Education ; "double slash")]
    #[test_case("/unknown", Route::NotFound ; "unknown single segment")]
    #[test_case("/doctor/patient", Route::NotFound ; "missing patient id")]
    #[test_case("/doctor/patient/u-1/extra", Route::NotFound ; "too many segments")]
    #[test_case("/assessment/step2", Route::NotFound ; "unknown subpath")]
    fn test_parse_path(path: &str, expected: Route) {
        assert_eq!(parse_path(path), expected);
    }

    #[test]
    fn test_parse_path_extracts_patient_id() {
        match parse_path("/doctor/patient/u-42") {
            Route::DoctorPatient { patient_id } => assert_eq!(patient_id.as_str(), "u-42"),
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn test_parse_path_blank_patient_id_is_not_found() {
        // Empty segments are dropped, so a blank id leaves too few segments.
        assert_eq!(parse_path("/doctor/patient//"), Route::NotFound);
    }

    #[test]
    fn test_parse_path_does_not_percent_decode() {
        assert_eq!(
            parse_path("/doctor/patient/%20"),
            Route::DoctorPatient {
                patient_id: UserId::new("%20").unwrap(),
            }
        );
    }

    #[test]
    fn test_open_routes_render_for_everyone() {
        for role in [None, Some(Role::Patient), Some(Role::Doctor), Some(Role::Admin)] {
            assert_eq!(select_view(&Route::Home, role), View::Home);
            assert_eq!(select_view(&Route::Assessment, role), View::Assessment);
            assert_eq!(select_view(&Route::Education, role), View::Education);
            assert_eq!(select_view(&Route::Reminders, role), View::Reminders);
            assert_eq!(select_view(&Route::NotFound, role), View::NotFound);
        }
    }

    #[test]
    fn test_doctor_routes_require_doctor_role() {
        let record = Route::DoctorPatient {
            patient_id: UserId::new("u-42").unwrap(),
        };

        assert_eq!(
            select_view(&Route::DoctorDashboard, Some(Role::Doctor)),
            View::DoctorDashboard
        );
        assert_eq!(
            select_view(&record, Some(Role::Doctor)),
            View::DoctorPatient {
                patient_id: UserId::new("u-42").unwrap()
            }
        );

        for denied in [None, Some(Role::Patient), Some(Role::Admin)] {
            assert_eq!(select_view(&Route::DoctorDashboard, denied), View::Home);
            assert_eq!(select_view(&record, denied), View::Home);
        }
    }

    #[test]
    fn test_admin_route_requires_admin_role() {
        assert_eq!(select_view(&Route::Admin, Some(Role::Admin)), View::AdminPanel);
        for denied in [None, Some(Role::Patient), Some(Role::Doctor)] {
            assert_eq!(select_view(&Route::Admin, denied), View::Home);
        }
    }
}
