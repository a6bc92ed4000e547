use yew::prelude::*;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        icon: "fa-upload",
        title: "Upload MRI",
        description: "Drag and drop your MRI scan image (JPG or PNG). We process the data locally and securely.",
        color: "step-blue",
    },
    Step {
        icon: "fa-flask",
        title: "AI Analysis",
        description: "Our deep learning model analyzes the neural patterns to detect potential anomalies.",
        color: "step-indigo",
    },
    Step {
        icon: "fa-circle-check",
        title: "Get Results",
        description: "Receive instant prediction results with confidence scores to aid medical diagnosis.",
        color: "step-cyan",
    },
];

pub fn render_features(node_ref: &NodeRef) -> Html {
    html! {
        <section id="features" class="features" ref={node_ref.clone()}>
            <div class="section-heading">
                <h2>{"How It Works"}</h2>
                <p>
                    {"Our advanced diagnosis process is designed to be simple, fast, and accurate for medical professionals."}
                </p>
            </div>
            <div class="steps">
                { for STEPS.iter().map(render_step) }
            </div>
        </section>
    }
}

fn render_step(step: &Step) -> Html {
    html! {
        <div class="step" key={step.title}>
            <div class={classes!("step-icon", step.color)}>
                <i class={classes!("fa-solid", step.icon)}></i>
            </div>
            <h3>{ step.title }</h3>
            <p>{ step.description }</p>
        </div>
    }
}
