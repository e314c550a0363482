use launch_axioms::intrinsics::{Intrinsic, ScalarType, catalogue, resolve, signatures};

pub fn run(
    name: Option<&str>,
    args: Option<&str>,
    family: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    match (name, args) {
        (Some(name), Some(args)) => {
            let args = parse_args(args)?;
            let intrinsic = resolve(name, &args)?;
            println!("{intrinsic}");
            Ok(())
        }
        (Some(name), None) => {
            let overloads = signatures(name);
            if overloads.is_empty() {
                return Err(format!("unknown intrinsic '{name}'").into());
            }
            print_list(overloads.into_iter(), family);
            Ok(())
        }
        (None, Some(_)) => Err("--args needs an intrinsic name".into()),
        (None, None) => {
            print_list(catalogue().iter(), family);
            Ok(())
        }
    }
}

fn parse_args(args: &str) -> Result<Vec<ScalarType>, String> {
    if args.trim().is_empty() {
        return Ok(Vec::new());
    }
    args.split(',').map(str::parse::<ScalarType>).collect()
}

fn print_list<'a>(intrinsics: impl Iterator<Item = &'a Intrinsic>, family: Option<&str>) {
    let mut count = 0usize;
    for intrinsic in intrinsics.filter(|i| family.is_none_or(|f| i.family.to_string() == f)) {
        println!("{:<18} {intrinsic}", intrinsic.family.to_string());
        count += 1;
    }
    println!("\n{count} intrinsic(s)");
}
