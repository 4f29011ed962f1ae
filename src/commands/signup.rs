use anyhow::Result;
use tracing::{info, warn};

use crate::cli::SignupArgs;
use crate::context::AppContext;
use crate::signup::{SignupForm, SignupValidator};
use crate::store::insert_signup;

pub fn run(context: &AppContext, args: SignupArgs) -> Result<()> {
    let form = SignupForm {
        name: args.name,
        email: args.email,
        organization: args.organization,
        message: args.message,
    };

    let validator = SignupValidator::new()?;
    let signup = match validator.validate(&form) {
        Ok(signup) => signup,
        Err(rejected) => {
            for problem in &rejected.problems {
                warn!(problem = %problem, "invalid signup field");
            }
            return Err(rejected.into());
        }
    };

    let connection = context.connect()?;
    let signup_id = insert_signup(&connection, &signup)?;

    info!(
        signup_id,
        has_organization = signup.organization.is_some(),
        "interest signup recorded"
    );
    Ok(())
}
