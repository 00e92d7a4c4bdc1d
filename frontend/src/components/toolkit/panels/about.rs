use yew::prelude::*;

pub fn about_panel() -> Html {
    html! {
        <>
            <h2>{ "About AI Resume Builder" }</h2>
            <h3>{ "Your Professional Career Toolkit" }</h3>
            <p>{ "This platform helps students and professionals create:" }</p>
            <ul>
                <li>{ "Professional resumes tailored to specific roles" }</li>
                <li>{ "Compelling cover letters that stand out" }</li>
                <li>{ "Standalone portfolio pages ready to publish" }</li>
                <li>{ "PDF exports ready for job applications" }</li>
            </ul>
            <h3>{ "Features" }</h3>
            <ul>
                <li>{ "AI-powered content generation" }</li>
                <li>{ "ATS-friendly resume formats" }</li>
                <li>{ "Real-time preview" }</li>
                <li>{ "One-click PDF, HTML and text downloads" }</li>
            </ul>
        </>
    }
}
