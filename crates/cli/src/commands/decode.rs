use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use param_env::Environment;
use request_params::{Arguments, GraphQLRequestParams};

use super::command::{
    CommandDefinition, converter, encoding_arg, get, get_required, input_file_arg,
};

/// Validate a GraphQL POST body and print the request it carries
pub struct DecodeBodyCommandDefinition {}

impl CommandDefinition for DecodeBodyCommandDefinition {
    fn command(&self) -> Command {
        Command::new("decode-body")
            .about("Validate a GraphQL POST body and print the request it carries")
            .arg(input_file_arg())
            .arg(encoding_arg())
    }

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()> {
        let file: Option<PathBuf> = get(matches, "file");
        let encoding: Option<String> = get(matches, "encoding");

        let body = match &file {
            Some(path) => fs::read(path)
                .with_context(|| format!("Failed to read file `{}`", path.display()))?,
            None => {
                let mut body = vec![];
                io::stdin()
                    .read_to_end(&mut body)
                    .context("Failed to read stdin")?;
                body
            }
        };
        tracing::debug!("Read {} bytes of POST body", body.len());

        let params = converter(env)?.from_post_body(&body, encoding.as_deref())?;
        print_params(&params)
    }
}

/// Validate a GraphQL GET query string and print the request it carries
pub struct DecodeQueryCommandDefinition {}

impl CommandDefinition for DecodeQueryCommandDefinition {
    fn command(&self) -> Command {
        Command::new("decode-query")
            .about("Validate a GraphQL GET query string and print the request it carries")
            .arg(
                Arg::new("query-string")
                    .help("The URL query string, for example 'query=query+%7B+ping+%7D'")
                    .required(true)
                    .index(1),
            )
            .arg(encoding_arg())
    }

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()> {
        let query_string: String = get_required(matches, "query-string")?;
        let encoding: Option<String> = get(matches, "encoding");

        let arguments = Arguments::parse_query_string(&query_string);
        let params = converter(env)?.from_arguments(&arguments, encoding.as_deref())?;
        print_params(&params)
    }
}

fn print_params(params: &GraphQLRequestParams) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(params)?);
    Ok(())
}
