use anyhow::Result;
use clap::{ArgMatches, Command};
use param_env::Environment;

use super::command::{
    CommandDefinition, converter, operation_name_arg, params_from_matches, query_arg,
    variables_arg,
};

/// Print the JSON body of a GraphQL POST request
pub struct PostBodyCommandDefinition {}

impl CommandDefinition for PostBodyCommandDefinition {
    fn command(&self) -> Command {
        Command::new("post-body")
            .about("Print the JSON body of a GraphQL POST request")
            .arg(query_arg())
            .arg(operation_name_arg())
            .arg(variables_arg())
    }

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()> {
        let params = params_from_matches(matches)?;
        let body = converter(env)?.to_post_body_string(&params)?;

        println!("{body}");
        Ok(())
    }
}

/// Print the URL query string of a GraphQL GET request
pub struct GetParamsCommandDefinition {}

impl CommandDefinition for GetParamsCommandDefinition {
    fn command(&self) -> Command {
        Command::new("get-params")
            .about("Print the URL query string of a GraphQL GET request")
            .arg(query_arg())
            .arg(operation_name_arg())
            .arg(variables_arg())
    }

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()> {
        let params = params_from_matches(matches)?;
        let query_string = converter(env)?.to_get_arguments(&params).to_query_string();

        println!("{query_string}");
        Ok(())
    }
}
