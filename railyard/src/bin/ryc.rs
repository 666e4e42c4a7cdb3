use railyard::{eval, ShuntingParser};

fn process(expr: &str, rpn_only: bool) -> Result<(), String> {
    let rpn = ShuntingParser::parse_str(expr).map_err(|e| format!("Parse err: {:?}", e))?;
    if rpn_only {
        println!("{}", rpn);
    } else {
        let result = eval(&rpn).map_err(|e| format!("Eval err: {:?}", e))?;
        println!("{}", result);
    }
    Ok(())
}

fn repl() -> Result<(), String> {
    use rustyline::error::ReadlineError;

    let histpath = dirs::home_dir().map(|home| home.join(".railyard_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        let _ = rl.load_history(path);
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match ShuntingParser::parse_str(&line) {
                    Err(e) => println!("Parse err: {:?}", e),
                    Ok(rpn) => match eval(&rpn) {
                        Err(e) => println!("Eval err: {:?}", e),
                        Ok(result) => println!("{}= {}", rpn, result),
                    },
                }
            }
        }
    }
    if let Some(path) = &histpath {
        let _ = rl.save_history(path);
    }
    Ok(())
}

fn main() -> Result<(), String> {
    use std::io::IsTerminal;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let rpn_only = matches!(args.first().map(String::as_str), Some("-r" | "--rpn"));
    if rpn_only {
        args.remove(0);
    }

    if !args.is_empty() {
        process(&args.join(" "), rpn_only)
    } else if !std::io::stdin().is_terminal() {
        // fed from a pipe: one line in, one result out
        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Read err: {}", e))?;
        process(&line, rpn_only)
    } else {
        repl()
    }
}
