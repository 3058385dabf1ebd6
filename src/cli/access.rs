use crate::access::{
    check_rbac, AbacPolicy, AccessRequest, AccessTime, Clearance, Permission, Role,
};

/// Options for the access command
/// With a query set, only that role/permission pair is checked; otherwise
/// the full demonstration matrix for both models is printed
#[derive(Debug, Clone, Default)]
pub struct AccessOptions {
    pub query: Option<(Role, Permission)>,
}

/// Run the access-control demonstration, returning the decision report
pub fn run_access(options: &AccessOptions) -> String {
    let mut output = String::new();

    if let Some((role, permission)) = options.query {
        output.push_str(&decision_line(role, permission));
        return output;
    }

    output.push_str("RBAC Simulation\n");
    output.push_str("===============\n\n");
    for (role, permission) in [
        (Role::Admin, Permission::Delete),
        (Role::User, Permission::Delete),
        (Role::Guest, Permission::Read),
        (Role::Guest, Permission::Write),
    ] {
        output.push_str(&decision_line(role, permission));
    }

    output.push_str("\nABAC Simulation\n");
    output.push_str("===============\n\n");
    let policy = AbacPolicy::default();
    for request in [
        AccessRequest::new("IT", Clearance::High, AccessTime::WorkingHours),
        AccessRequest::new("HR", Clearance::High, AccessTime::WorkingHours),
        AccessRequest::new("IT", Clearance::Low, AccessTime::WorkingHours),
        AccessRequest::new("IT", Clearance::High, AccessTime::NonWorkingHours),
    ] {
        output.push_str(&format!(
            "Department: {}, Clearance: {}, Time: {} -> {}\n",
            request.department,
            request.clearance,
            request.time,
            verdict(policy.allows(&request))
        ));
    }

    output
}

fn decision_line(role: Role, permission: Permission) -> String {
    format!(
        "Role: {} | Permission: {} -> {}\n",
        role,
        permission,
        verdict(check_rbac(role, permission))
    )
}

fn verdict(granted: bool) -> &'static str {
    if granted {
        "ACCESS GRANTED"
    } else {
        "ACCESS DENIED"
    }
}
