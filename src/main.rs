use std::{env, fs::read_to_string, process, time::Instant};

use microml::{ast::ast::Node, format_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: microml <file>");
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(2);
        }
    };

    let start = Instant::now();

    let tokens = tokenize(&source);
    println!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    let parse_start = Instant::now();
    let parsed_ast = parse(tokens, &source);

    println!("Parsed in {:?}", parse_start.elapsed());

    match parsed_ast {
        Ok(Some(ast)) => {
            print!("{}", render_tree(&ast));
            println!("{} nodes, depth {}", ast.size(), ast.depth());
        }
        Ok(None) => println!("(empty program)"),
        Err(error) => {
            println!("{}", format_error(&error));
            process::exit(1);
        }
    }
}

fn render_tree(root: &Node) -> String {
    let mut result = String::new();
    render_node(root, 0, &mut result);
    result
}

fn render_node(node: &Node, indent: usize, result: &mut String) {
    result.push_str(&"  ".repeat(indent));
    result.push_str(&node.label());
    result.push('\n');

    for child in node.children() {
        render_node(child, indent + 1, result);
    }
}
