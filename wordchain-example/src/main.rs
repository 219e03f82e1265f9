use wordchain_core::model::chain::Chain;
use wordchain_core::text::{assemble, tokenize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A chain keyed on single-token contexts. Longer prefix lengths give
    // less surprising (more verbatim) output.
    let mut chain = Chain::new(1)?;

    // A prefix length of zero is rejected at construction time
    match Chain::new(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Prefix length 0 is invalid: {}", e),
    }

    // Build accumulates: each call appends to the same transition tables
    chain.build(&tokenize("What noise annoys a noisy oyster?"));
    chain.build(&tokenize("A noisy noise annoys a noisy oyster."));
    chain.build(&tokenize("Any noise annoys an oyster but a noisy noise annoys an oyster most."));

    println!(
        "Chain built: {} forward contexts, {} backward contexts",
        chain.forward_contexts(),
        chain.backward_contexts()
    );

    // Forward walk from the empty context: starts on a sentence opener.
    // The walk ends at a dead end; take() bounds it in case it cycles
    let forward: Vec<String> = chain.generate_forward().take(30).collect();
    println!("Forward walk: {}", assemble(&forward));

    // Backward walk: starts on a sentence closer and walks toward openers,
    // so the output reads right-to-left
    let backward: Vec<String> = chain.generate_backward().take(30).collect();
    println!("Backward walk: {}", assemble(&backward));

    // Seeded walk. Seeds longer than the prefix length keep only their
    // last tokens; shorter seeds are padded at the front
    let seeded: Vec<String> = chain
        .generate_forward_from_prefix(&["a", "noisy"])
        .take(30)
        .collect();
    println!("Walk from 'noisy': {}", assemble(&seeded));

    // Inspect the recorded continuations without advancing.
    // Duplicates encode frequency: "annoys" follows "noise" more than once
    let generation = chain.generate_forward_from_prefix(&["noise"]);
    println!("Options after 'noise': {:?}", generation.options());

    // Force the cursor onto a chosen continuation with next_with,
    // then let the random walk resume from there
    let mut generation = chain.generate_forward_from_prefix(&["What"]);
    generation.next_with("noise");
    let resumed: Vec<String> = generation.by_ref().take(30).collect();
    println!("Forced through 'noise': {}", assemble(&resumed));

    // Forcing an unrecorded token strands the cursor: next() yields None
    generation.next_with("impossible");
    match generation.next() {
        Some(token) => println!("Should not happen: {}", token),
        None => println!("Context 'impossible' was never recorded; walk is dry"),
    }

    Ok(())
}
